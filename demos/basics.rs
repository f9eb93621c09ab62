// Use the single-threaded probing table.
use lptable::unsync::ProbingTable;

use std::{
    sync::{Arc, Mutex},
    thread,
};

fn value(n: usize) -> String {
    format!("value {n}")
}

fn main() {
    const NUM_THREADS: usize = 16;
    const NUM_KEYS_PER_THREAD: usize = 64;

    // Create a table with 64 slots that grows once it is 75% full.
    let table = ProbingTable::new(64, 0.75);

    // The table is not synchronized. To share it across threads, put it
    // behind a lock.
    let table = Arc::new(Mutex::new(table));

    let threads: Vec<_> = (0..NUM_THREADS)
        .map(|i| {
            let my_table = Arc::clone(&table);
            let start = i * NUM_KEYS_PER_THREAD;
            let end = (i + 1) * NUM_KEYS_PER_THREAD;

            thread::spawn(move || {
                let mut table = my_table.lock().expect("Poisoned");

                // Insert 64 records. (NUM_KEYS_PER_THREAD = 64)
                for key in start..end {
                    table.update(key.to_string(), value(key));
                    assert_eq!(table.find(&key.to_string()), Some(&value(key)));
                }

                // Remove every 4th of the inserted records.
                for key in (start..end).step_by(4) {
                    assert!(table.remove(&key.to_string()));
                }
            })
        })
        .collect();

    // Wait for all threads to complete.
    threads.into_iter().for_each(|t| t.join().expect("Failed"));

    // Verify the result.
    let table = table.lock().expect("Poisoned");
    for key in 0..(NUM_THREADS * NUM_KEYS_PER_THREAD) {
        if key % 4 == 0 {
            assert_eq!(table.find(&key.to_string()), None);
        } else {
            assert_eq!(table.find(&key.to_string()), Some(&value(key)));
        }
    }

    println!("{:?}", table.stats());
}
