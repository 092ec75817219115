// crates/shared-kernel/tests/counts_sum.rs
use daily_avg_shared_kernel::ReadingCount;

#[test]
fn reading_count_sum() {
    let total = [1u32, 2, 3].into_iter().map(ReadingCount::from).sum::<ReadingCount>();
    assert_eq!(u32::from(total), 6);
}

#[test]
fn reading_count_sum_ref() {
    let values = [ReadingCount::from(5), ReadingCount::from(7)];
    let total: ReadingCount = values.iter().sum();
    assert_eq!(total, 12);
}

#[test]
fn reading_count_add_assign() {
    let mut count = ReadingCount::one();
    count += ReadingCount::from(2);
    assert_eq!(count, 3);
    count += 1;
    assert_eq!(count.value(), 4);
    assert_eq!((count + 1).as_f64(), 5.0);
}

#[test]
fn default_is_zero() {
    assert!(ReadingCount::default().is_zero());
    assert_eq!(ReadingCount::zero().to_string(), "0");
}
