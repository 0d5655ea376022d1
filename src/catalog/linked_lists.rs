// Built-in linked list operations

use crate::script::{Operation, Step};
use crate::viz::ListAction::{self, *};

fn walk(from: usize, to: usize, message: &str) -> Step<ListAction> {
    Step::new(
        Move {
            node_index: to,
            prev_index: Some(from),
        },
        message,
        "traverse",
    )
}

pub fn operations() -> Vec<Operation<ListAction>> {
    vec![
        Operation::new(
            "traverse",
            "Traverse",
            "Visiting each node from head to tail",
            vec![
                Step::new(Highlight { node_index: Some(0) }, "Start at head node (value: 10)", "start"),
                walk(0, 1, "Follow next pointer to node (value: 20)"),
                walk(1, 2, "Follow next pointer to node (value: 30)"),
                walk(2, 3, "Follow next pointer to node (value: 40)"),
                walk(3, 4, "Follow next pointer to node (value: 50)"),
                Step::new(Complete { node_index: None }, "Reached null — traversal complete. O(n) time", "complete"),
            ],
        ),
        Operation::new(
            "search",
            "Search",
            "Finding node with value 30",
            vec![
                Step::new(Scan { node_index: 0 }, "Check head: 10 ≠ 30", "compare"),
                Step::new(Scan { node_index: 1 }, "Check next: 20 ≠ 30", "compare"),
                Step::new(Found { node_index: 2 }, "Check next: 30 = 30 — Found!", "found"),
                Step::new(Complete { node_index: Some(2) }, "Node found at position 2. O(n) time", "complete"),
            ],
        ),
        Operation::new(
            "insert-head",
            "Insert Head",
            "Adding node with value 5 at the beginning",
            vec![
                Step::new(Highlight { node_index: Some(0) }, "Current head is node with value 10", "identify"),
                Step::new(CreateNode { value: 5 }, "Create new node with value 5", "create"),
                Step::new(LinkNew, "Set new node's next to current head", "link"),
                Step::new(InsertHead { value: 5 }, "Update head pointer to new node", "insert"),
                Step::new(Complete { node_index: Some(0) }, "Insertion complete. O(1) time", "complete"),
            ],
        ),
        Operation::new(
            "insert-tail",
            "Insert Tail",
            "Adding node with value 60 at the end",
            vec![
                Step::new(Highlight { node_index: Some(0) }, "Start at head to find tail", "start"),
                walk(0, 1, "Traverse: not at tail yet"),
                walk(1, 2, "Traverse: not at tail yet"),
                walk(2, 3, "Traverse: not at tail yet"),
                walk(3, 4, "Found tail node (next is null)"),
                Step::new(CreateNode { value: 60 }, "Create new node with value 60", "create"),
                Step::new(InsertTail { value: 60 }, "Link tail's next to new node", "insert"),
                Step::new(Complete { node_index: Some(5) }, "Insertion complete. O(n) time for singly linked", "complete"),
            ],
        ),
        Operation::new(
            "insert-at",
            "Insert At",
            "Insert value 25 at position 2",
            vec![
                Step::new(Highlight { node_index: Some(0) }, "Start at head, target position 2", "start"),
                walk(0, 1, "At position 1, need position 2"),
                Step::new(Highlight { node_index: Some(1) }, "Found insertion point after this node", "identify"),
                Step::new(CreateNode { value: 25 }, "Create new node with value 25", "create"),
                Step::new(InsertAt { value: 25, position: 2 }, "Link new node and update pointers", "insert"),
                Step::new(Complete { node_index: Some(2) }, "Insertion complete. O(n) time", "complete"),
            ],
        ),
        Operation::new(
            "delete-head",
            "Delete Head",
            "Removing the first node",
            vec![
                Step::new(Highlight { node_index: Some(0) }, "Target: head node (value: 10)", "identify"),
                Step::new(MarkDelete { node_index: 0 }, "Mark node for deletion", "mark"),
                Step::new(DeleteHead, "Update head to point to second node", "delete"),
                Step::new(Complete { node_index: Some(0) }, "Deletion complete. O(1) time", "complete"),
            ],
        ),
        Operation::new(
            "delete-tail",
            "Delete Tail",
            "Removing the last node",
            vec![
                Step::new(Highlight { node_index: Some(0) }, "Start at head to find tail", "start"),
                walk(0, 1, "Traverse: looking for second-to-last"),
                walk(1, 2, "Traverse: looking for second-to-last"),
                walk(2, 3, "Found second-to-last node"),
                Step::new(MarkDelete { node_index: 4 }, "Mark tail node for deletion", "mark"),
                Step::new(DeleteTail, "Set second-to-last node's next to null", "delete"),
                Step::new(Complete { node_index: None }, "Deletion complete. O(n) time for singly linked", "complete"),
            ],
        ),
        Operation::new(
            "delete-value",
            "Delete Value",
            "Delete node with value 30",
            vec![
                Step::new(Scan { node_index: 0 }, "Check: 10 ≠ 30", "compare"),
                Step::new(Scan { node_index: 1 }, "Check: 20 ≠ 30, but next node is target", "compare"),
                Step::new(MarkDelete { node_index: 2 }, "Found node with value 30, mark for deletion", "mark"),
                Step::new(DeleteValue { node_index: 2 }, "Update previous node's next to skip deleted node", "delete"),
                Step::new(Complete { node_index: None }, "Deletion complete. O(n) time", "complete"),
            ],
        ),
    ]
}
