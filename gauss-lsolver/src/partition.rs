use std::ops::Range;

/// Row range assigned to `worker` (`worker < thread_count`) at step `k` of an `n`-row system.
///
/// The `n - k - 1` rows below the pivot are split into `thread_count`
/// contiguous blocks; the first `total % thread_count` workers get one extra
/// row. Workers beyond the number of rows get an empty range.
pub fn worker_range(k: usize, n: usize, thread_count: usize, worker: usize) -> Range<usize> {
    let thread_count = thread_count.max(1);
    let first = k + 1;
    let total = n.saturating_sub(first);
    let base = total / thread_count;
    let extra = total % thread_count;

    let start = first + worker * base + worker.min(extra);
    let len = base + usize::from(worker < extra);
    start..start + len
}

/// All worker ranges for step `k`, in increasing row order.
pub fn partition_rows(k: usize, n: usize, thread_count: usize) -> Vec<Range<usize>> {
    (0..thread_count.max(1))
        .map(|worker| worker_range(k, n, thread_count, worker))
        .collect()
}

/// Splits the rows below the pivot into the disjoint mutable blocks of
/// [`partition_rows`]. `lower` must start at row `k + 1`. Empty blocks are skipped.
pub fn split_rows<T>(
    k: usize,
    lower: &mut [Vec<T>],
    thread_count: usize,
) -> Vec<(Range<usize>, &mut [Vec<T>])> {
    let n = k + 1 + lower.len();
    let mut blocks = Vec::with_capacity(thread_count);
    let mut rest = lower;
    for range in partition_rows(k, n, thread_count) {
        let (block, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        rest = tail;
        if !block.is_empty() {
            blocks.push((range, block));
        }
    }
    blocks
}
