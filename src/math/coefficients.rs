/// Highest curve degree the coefficient table will ever be grown to.
pub const DEGREE_LIMIT: usize = 160;

/// Growable cache of factorials and binomial coefficients.
///
/// Rows of Pascal's triangle are built with the multiplicative recurrence
/// `C(n, i) = C(n, i - 1) * (n - i + 1) / i`, which stays accurate at high
/// degree where dividing two large factorials would not.
///
/// Growth is monotonic: [`ensure`](Self::ensure) only appends entries and
/// never recomputes cached ones.
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    factorials: Vec<f64>,
    binomials: Vec<Vec<f64>>,
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self {
            factorials: vec![1.0, 1.0],
            binomials: vec![vec![1.0], vec![1.0, 1.0]],
        }
    }
}

impl CoefficientTable {
    /// Creates a table seeded with `0! = 1! = 1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table already grown to [`DEGREE_LIMIT`].
    #[must_use]
    pub fn preallocated() -> Self {
        let mut table = Self::new();
        table.ensure(DEGREE_LIMIT);
        table
    }

    /// Returns the highest degree currently cached.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.binomials.len() - 1
    }

    /// Grows the table so that every coefficient up to `degree` is cached.
    ///
    /// # Panics
    ///
    /// Panics if `degree` exceeds [`DEGREE_LIMIT`].
    #[allow(clippy::cast_precision_loss)]
    pub fn ensure(&mut self, degree: usize) {
        assert!(
            degree <= DEGREE_LIMIT,
            "degree {degree} exceeds the supported limit of {DEGREE_LIMIT}"
        );

        for k in self.factorials.len()..=degree {
            let next = k as f64 * self.factorials[k - 1];
            self.factorials.push(next);
        }

        for n in self.binomials.len()..=degree {
            let mut row = Vec::with_capacity(n + 1);
            row.push(1.0);
            for i in 1..n {
                let prev: f64 = row[i - 1];
                row.push(prev * (n - i + 1) as f64 / i as f64);
            }
            row.push(1.0);
            self.binomials.push(row);
        }
    }

    /// Returns `k!`.
    ///
    /// # Panics
    ///
    /// Panics if the table has not been grown to `k`.
    #[must_use]
    pub fn factorial(&self, k: usize) -> f64 {
        assert!(
            k < self.factorials.len(),
            "factorial({k}) requested before the table was grown"
        );
        self.factorials[k]
    }

    /// Returns the binomial coefficient `C(n, i)`.
    ///
    /// `i == 0` and `i == n` short-circuit to `1` without touching the table.
    ///
    /// # Panics
    ///
    /// Panics if `i > n` or the table has not been grown to degree `n`.
    #[must_use]
    pub fn binomial(&self, n: usize, i: usize) -> f64 {
        assert!(i <= n, "binomial({n}, {i}) is undefined");
        if i == 0 || i == n {
            return 1.0;
        }
        assert!(
            n <= self.degree(),
            "binomial({n}, {i}) requested before the table was grown"
        );
        self.binomials[n][i]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seeded_factorials() {
        let table = CoefficientTable::new();
        assert_relative_eq!(table.factorial(0), 1.0);
        assert_relative_eq!(table.factorial(1), 1.0);
        assert_eq!(table.degree(), 1);
    }

    #[test]
    fn small_binomials_are_exact() {
        let mut table = CoefficientTable::new();
        table.ensure(6);
        let row: Vec<f64> = (0..=6).map(|i| table.binomial(6, i)).collect();
        assert_eq!(row, vec![1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0]);
        assert_relative_eq!(table.factorial(6), 720.0);
    }

    #[test]
    fn endpoints_do_not_need_growth() {
        let table = CoefficientTable::new();
        assert_relative_eq!(table.binomial(120, 0), 1.0);
        assert_relative_eq!(table.binomial(120, 120), 1.0);
    }

    #[test]
    fn growth_is_idempotent() {
        let mut table = CoefficientTable::new();
        table.ensure(40);
        let before = table.binomial(40, 17);
        table.ensure(10);
        table.ensure(40);
        assert_eq!(table.degree(), 40);
        assert_eq!(table.binomial(40, 17).to_bits(), before.to_bits());
    }

    #[test]
    fn rows_are_symmetric_at_the_limit() {
        let table = CoefficientTable::preallocated();
        for i in 0..=DEGREE_LIMIT {
            assert_relative_eq!(
                table.binomial(DEGREE_LIMIT, i),
                table.binomial(DEGREE_LIMIT, DEGREE_LIMIT - i),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn recurrence_matches_factorial_division() {
        let table = CoefficientTable::preallocated();
        let n = 30;
        for i in 0..=n {
            let by_factorials =
                table.factorial(n) / (table.factorial(i) * table.factorial(n - i));
            assert_relative_eq!(table.binomial(n, i), by_factorials, max_relative = 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "before the table was grown")]
    fn using_an_ungrown_degree_is_fatal() {
        let table = CoefficientTable::new();
        let _ = table.binomial(12, 5);
    }

    #[test]
    #[should_panic(expected = "exceeds the supported limit")]
    fn growing_past_the_limit_is_fatal() {
        let mut table = CoefficientTable::new();
        table.ensure(DEGREE_LIMIT + 1);
    }
}
