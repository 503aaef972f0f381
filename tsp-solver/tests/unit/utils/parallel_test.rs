use super::*;

#[test]
fn can_map_reduce_on_pool() {
    let pool = ThreadPool::new(2).unwrap();
    let items = (1..=100).collect::<Vec<u64>>();

    let sum = pool.execute(|| map_reduce(items.as_slice(), |&item| item, || 0, |a, b| a + b));

    assert_eq!(sum, 5050);
    assert_eq!(pool.threads(), 2);
}

#[test]
fn can_keep_order_of_reduce_operands() {
    let pool = ThreadPool::new(4).unwrap();
    let items = (0..64).collect::<Vec<usize>>();

    let joined = pool.execute(|| {
        map_reduce(items.as_slice(), |&item| vec![item], Vec::new, |mut left, right| {
            left.extend(right);
            left
        })
    });

    assert_eq!(joined, items);
}
