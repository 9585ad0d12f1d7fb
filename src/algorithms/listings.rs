// Reference C++ implementations displayed next to the trace

pub const BUBBLE_SORT: &str = r#"void bubbleSort(int arr[], int n) {
    for (int i = 0; i < n - 1; i++) {
        for (int j = 0; j < n - i - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                // Swap arr[j] and arr[j + 1]
                int temp = arr[j];
                arr[j] = arr[j + 1];
                arr[j + 1] = temp;

                printArray(arr, n); // Visualizer Output
            }
        }
    }
}"#;

pub const SELECTION_SORT: &str = r#"void selectionSort(int arr[], int n) {
    for (int i = 0; i < n - 1; i++) {
        int min_idx = i;
        for (int j = i + 1; j < n; j++) {
            if (arr[j] < arr[min_idx])
                min_idx = j;
        }

        // Swap the found minimum element with the first element
        if (min_idx != i) {
            int temp = arr[min_idx];
            arr[min_idx] = arr[i];
            arr[i] = temp;

            printArray(arr, n); // Visualizer Output
        }
    }
}"#;

pub const INSERTION_SORT: &str = r#"void insertionSort(int arr[], int n) {
    for (int i = 1; i < n; i++) {
        int key = arr[i];
        int j = i - 1;

        // Shift larger elements one position to the right
        while (j >= 0 && arr[j] > key) {
            arr[j + 1] = arr[j];
            j--;
        }
        arr[j + 1] = key;

        printArray(arr, n); // Visualizer Output
    }
}"#;

pub const LINEAR_SEARCH: &str = r#"int linearSearch(int arr[], int n, int x) {
    for (int i = 0; i < n; i++) {
        if (arr[i] == x) {
            cout << "Found at index " << i << endl;
            return i;
        }
    }
    cout << "Not found" << endl;
    return -1;
}"#;

pub const BINARY_SEARCH: &str = r#"int binarySearch(int arr[], int n, int x) {
    sort(arr, arr + n); // Binary search needs sorted input

    int low = 0, high = n - 1;
    while (low <= high) {
        int mid = low + (high - low) / 2;
        if (arr[mid] == x) {
            cout << "Found at index " << mid << endl;
            return mid;
        }
        if (arr[mid] < x)
            low = mid + 1;  // Eliminate left half
        else
            high = mid - 1; // Eliminate right half
    }
    cout << "Not found" << endl;
    return -1;
}"#;
