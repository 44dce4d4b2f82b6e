use std::sync::Arc;
use std::thread;

use flatcfg_table::{ByteSpan, ConfigTable, Entries};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn table_and_views_are_thread_safe() {
    assert_send_sync::<ConfigTable>();
    assert_send_sync::<ByteSpan<'static>>();
    assert_send_sync::<Entries<'static>>();
}

#[test]
fn shared_table_reads_from_many_threads() {
    let content: String = (0..256).map(|i| format!("k{i:03} = v{i}\n")).collect();
    let table = Arc::new(ConfigTable::from_bytes(content));
    assert!(table.is_valid());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for i in (worker..256).step_by(8) {
                    let expected = format!("v{i}");
                    assert_eq!(table.lookup_str(format!("k{i:03}")), Some(expected.as_str()));
                }
                table.iter().count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 256);
    }
}

#[test]
fn scoped_threads_borrow_views() {
    let table = ConfigTable::from_bytes("alpha = 1\nbeta = 2\ngamma = 3\n");

    let values: Vec<&str> = thread::scope(|scope| {
        let workers: Vec<_> = ["gamma", "alpha", "beta"]
            .into_iter()
            .map(|key| {
                let table = &table;
                scope.spawn(move || table.lookup_str(key).unwrap())
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });

    assert_eq!(values, ["3", "1", "2"]);
}
