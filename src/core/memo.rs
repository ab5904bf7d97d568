use crate::utils::error::{RosterError, Result};
use std::collections::HashMap;

/// 最大不會溢位 u64 的費氏數列索引
pub const MAX_FIBONACCI_INDEX: u64 = 93;

/// 費氏數列的記憶化快取，由呼叫端持有
#[derive(Debug, Default, Clone)]
pub struct FibonacciMemo {
    cache: HashMap<u64, u64>,
}

impl FibonacciMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, n: u64) -> Result<u64> {
        if n <= 1 {
            return Ok(n);
        }
        if let Some(&value) = self.cache.get(&n) {
            return Ok(value);
        }
        if n > MAX_FIBONACCI_INDEX {
            return Err(RosterError::ArithmeticOverflow {
                operation: "fibonacci".to_string(),
                input: n,
            });
        }

        let value = self
            .get(n - 1)?
            .checked_add(self.get(n - 2)?)
            .ok_or_else(|| RosterError::ArithmeticOverflow {
                operation: "fibonacci".to_string(),
                input: n,
            })?;
        self.cache.insert(n, value);
        Ok(value)
    }

    /// 前 `count` 項
    pub fn sequence(&mut self, count: u64) -> Result<Vec<u64>> {
        (0..count).map(|n| self.get(n)).collect()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fifteen() {
        let mut memo = FibonacciMemo::new();
        assert_eq!(
            memo.sequence(15).unwrap(),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377]
        );
    }

    #[test]
    fn test_base_cases_not_cached() {
        let mut memo = FibonacciMemo::new();
        assert_eq!(memo.get(0).unwrap(), 0);
        assert_eq!(memo.get(1).unwrap(), 1);
        assert_eq!(memo.cached_len(), 0);
    }

    #[test]
    fn test_cache_is_reused() {
        let mut memo = FibonacciMemo::new();
        assert_eq!(memo.get(10).unwrap(), 55);
        // 2..=10
        assert_eq!(memo.cached_len(), 9);

        assert_eq!(memo.get(8).unwrap(), 21);
        assert_eq!(memo.cached_len(), 9);

        memo.clear();
        assert_eq!(memo.cached_len(), 0);
    }

    #[test]
    fn test_largest_index_fits() {
        let mut memo = FibonacciMemo::new();
        assert_eq!(memo.get(MAX_FIBONACCI_INDEX).unwrap(), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut memo = FibonacciMemo::new();
        let err = memo.get(MAX_FIBONACCI_INDEX + 1).unwrap_err();
        assert!(matches!(
            err,
            RosterError::ArithmeticOverflow { input, .. } if input == MAX_FIBONACCI_INDEX + 1
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let mut memo = FibonacciMemo::new();
        assert!(memo.sequence(0).unwrap().is_empty());
    }
}
