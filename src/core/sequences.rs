pub fn squares(limit: u64) -> Vec<u64> {
    (1..=limit).map(|x| x * x).collect()
}

pub fn even_squares(squares: &[u64]) -> Vec<u64> {
    squares.iter().copied().filter(|x| x % 2 == 0).collect()
}
