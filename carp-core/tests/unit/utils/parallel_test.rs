use super::*;

#[test]
fn can_map_collection_in_parallel_keeping_order() {
    let source = (0..128).collect::<Vec<_>>();

    let result = parallel_into_collect(source, |item| item * 2);

    assert_eq!(result, (0..128).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_operation_on_thread_pool() {
    let pool = ThreadPool::new(2);

    let result = pool.execute(|| 40 + 2);

    assert_eq!(result, 42);
}
