// Built-in array operations

use crate::script::{Operation, Step};
use crate::viz::ArrayAction::{self, *};

pub fn operations() -> Vec<Operation<ArrayAction>> {
    vec![
        Operation::new(
            "access",
            "Access",
            "Accessing element at index 2",
            vec![
                Step::new(Highlight { index: 2 }, "Calculate memory address: base + (index × size)", "calculate"),
                Step::new(Select { index: 2 }, "Direct access to arr[2]", "access"),
                Step::new(Complete { index: Some(2) }, "Value retrieved: 12 — O(1) time", "complete"),
            ],
        ),
        Operation::new(
            "search",
            "Search",
            "Linear search for value 22",
            vec![
                Step::new(Scan { index: 0 }, "Check index 0: 64 ≠ 22", "compare"),
                Step::new(Scan { index: 1 }, "Check index 1: 25 ≠ 22", "compare"),
                Step::new(Scan { index: 2 }, "Check index 2: 12 ≠ 22", "compare"),
                Step::new(Found { index: 3 }, "Check index 3: 22 = 22 — Found!", "found"),
                Step::new(Complete { index: Some(3) }, "Element found at index 3 — O(n) time", "complete"),
            ],
        ),
        Operation::new(
            "insert",
            "Insert",
            "Insert value 17 at index 2",
            vec![
                Step::new(Highlight { index: 2 }, "Target position: index 2", "target"),
                Step::new(Shift { indices: vec![4, 3, 2] }, "Shift elements right to make space", "shift"),
                Step::new(Insert { index: 2, value: 17 }, "Insert 17 at index 2", "insert"),
                Step::new(Complete { index: Some(2) }, "Insertion complete — O(n) time", "complete"),
            ],
        ),
        Operation::new(
            "delete",
            "Delete",
            "Delete element at index 1",
            vec![
                Step::new(Highlight { index: 1 }, "Target element: 25 at index 1", "target"),
                Step::new(Remove { index: 1 }, "Remove element from array", "remove"),
                Step::new(ShiftLeft { indices: vec![2, 3, 4] }, "Shift elements left to fill gap", "shift"),
                Step::new(Complete { index: None }, "Deletion complete — O(n) time", "complete"),
            ],
        ),
        Operation::new(
            "update",
            "Update",
            "Update value at index 3 to 99",
            vec![
                Step::new(Highlight { index: 3 }, "Calculate memory address for index 3", "calculate"),
                Step::new(Select { index: 3 }, "Access arr[3] — current value: 22", "access"),
                Step::new(Update { index: 3, value: 99 }, "Write new value: 99", "update"),
                Step::new(Complete { index: Some(3) }, "Update complete — O(1) time", "complete"),
            ],
        ),
    ]
}
