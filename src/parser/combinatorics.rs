//! Combinatorial enumeration shared by complex and drag mode processing
//! (`spec.md` §4.5.3).
//!
//! Neither enumerator over-materializes: combinations are built directly in
//! lexicographic order over the pool's given order, and the Cartesian
//! product walks pool-by-pool, abandoning a partial tuple the moment it
//! repeats a number rather than generating the full raw product first and
//! filtering afterward.

/// Every `r`-combination of `pool`, in lexicographic index order.
///
/// `pool` is taken as-is; the caller controls whether it's sorted. Returns
/// an empty vector if `r` is zero or larger than `pool`.
pub fn combinations(pool: &[u32], r: usize) -> Vec<Vec<u32>> {
    let mut result = Vec::new();
    if r == 0 || r > pool.len() {
        return result;
    }
    let mut current = Vec::with_capacity(r);
    combine_from(pool, r, 0, &mut current, &mut result);
    result
}

fn combine_from(pool: &[u32], r: usize, start: usize, current: &mut Vec<u32>, result: &mut Vec<Vec<u32>>) {
    if current.len() == r {
        result.push(current.clone());
        return;
    }
    let remaining_needed = r - current.len();
    if pool.len() - start < remaining_needed {
        return;
    }
    for i in start..pool.len() {
        current.push(pool[i]);
        combine_from(pool, r, i + 1, current, result);
        current.pop();
    }
}

/// The Cartesian product across `pools`, keeping only tuples whose numbers
/// are pairwise distinct.
pub fn cartesian_distinct(pools: &[Vec<u32>]) -> Vec<Vec<u32>> {
    let mut result = Vec::new();
    if pools.is_empty() || pools.iter().any(Vec::is_empty) {
        return result;
    }
    let mut current = Vec::with_capacity(pools.len());
    cartesian_from(pools, 0, &mut current, &mut result);
    result
}

fn cartesian_from(pools: &[Vec<u32>], idx: usize, current: &mut Vec<u32>, result: &mut Vec<Vec<u32>>) {
    if idx == pools.len() {
        result.push(current.clone());
        return;
    }
    for &n in &pools[idx] {
        if current.contains(&n) {
            continue;
        }
        current.push(n);
        cartesian_from(pools, idx + 1, current, result);
        current.pop();
    }
}
