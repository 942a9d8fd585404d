use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Check that every value is strictly greater than the one before it
    ///
    /// Returns the first offending pair as an error. Any NAN or infinite values
    /// are rejected outright since they can not be ordered meaningfully.
    ///
    /// ```rust
    /// # use actools_utils::SliceExt;
    /// # use actools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.0e5, 1.0e6, 2.0e7].check_ascending(), Ok(()));
    /// assert_eq!([1.0].check_ascending(), Ok(()));
    ///
    /// // Error cases
    /// assert_eq!(
    ///     [1.0e6, 1.0e5].check_ascending(),
    ///     Err(Error::SliceNotAscending { position: 1, previous: 1.0e6, value: 1.0e5 })
    /// );
    /// assert!([1.0, 1.0].check_ascending().is_err());
    /// assert_eq!([1.0, f64::NAN].check_ascending(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    ///
    /// An empty slice is trivially ascending.
    fn check_ascending(&self) -> Result<()>;

    /// Sum of all values, rejecting NAN and infinite values
    ///
    /// ```rust
    /// # use actools_utils::SliceExt;
    /// # use actools_utils::Error;
    /// assert_eq!([1.0, 2.0, 3.0].try_sum(), Ok(6.0));
    /// assert_eq!(Vec::<f64>::new().try_sum(), Err(Error::SliceContainsNoValues));
    /// assert_eq!([1.0, f64::INFINITY].try_sum(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_sum(&self) -> Result<T>;

    /// Scale every value such that the collection sums to 1
    ///
    /// Division by a zero sum is an error rather than a slice full of NAN.
    ///
    /// ```rust
    /// # use actools_utils::SliceExt;
    /// # use actools_utils::Error;
    /// assert_eq!([1.0, 3.0].try_normalise(), Ok(vec![0.25, 0.75]));
    /// assert_eq!([0.0, 0.0].try_normalise(), Err(Error::SliceSumIsZero));
    /// ```
    fn try_normalise(&self) -> Result<Vec<T>>;

    /// Running total with a leading zero
    ///
    /// The result has one more value than the input. For a list of time step
    /// durations this gives the time at every step boundary, starting from 0.
    ///
    /// ```rust
    /// # use actools_utils::SliceExt;
    /// assert_eq!([10.0, 20.0, 30.0].cumulative_from_zero(), vec![0.0, 10.0, 30.0, 60.0]);
    /// assert_eq!(Vec::<f64>::new().cumulative_from_zero(), vec![0.0]);
    /// ```
    fn cumulative_from_zero(&self) -> Vec<T>;

    /// True if every value is exactly zero
    ///
    /// ```rust
    /// # use actools_utils::SliceExt;
    /// assert!([0.0, -0.0, 0.0].is_all_zero());
    /// assert!(![0.0, 1.5].is_all_zero());
    /// ```
    fn is_all_zero(&self) -> bool;
}

impl SliceExt<f64> for [f64] {
    fn check_ascending(&self) -> Result<()> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        }

        // windows of 2 are empty for slices shorter than 2, which is fine
        for (idx, pair) in self.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(Error::SliceNotAscending {
                    position: idx + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }

        Ok(())
    }

    fn try_sum(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::SliceContainsNoValues);
        }

        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        }

        Ok(self.iter().sum())
    }

    fn try_normalise(&self) -> Result<Vec<f64>> {
        let total = self.try_sum()?;

        if total == 0.0 {
            return Err(Error::SliceSumIsZero);
        }

        Ok(self.iter().map(|v| v / total).collect())
    }

    fn cumulative_from_zero(&self) -> Vec<f64> {
        let mut total = 0.0;
        let mut cumulative = Vec::with_capacity(self.len() + 1);
        cumulative.push(total);

        for value in self {
            total += value;
            cumulative.push(total);
        }

        cumulative
    }

    fn is_all_zero(&self) -> bool {
        self.iter().all(|v| v.abs() == 0.0)
    }
}
