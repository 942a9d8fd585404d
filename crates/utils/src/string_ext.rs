/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter in a string
    ///
    /// ```rust
    /// # use actools_utils::StringExt;
    /// assert_eq!("co".capitalise(), "Co".to_string());
    /// assert_eq!("".capitalise(), "".to_string());
    /// ```
    fn capitalise(&self) -> String;

    /// Removes every occurrence of `pattern` from the string
    ///
    /// ```rust
    /// # use actools_utils::StringExt;
    /// assert_eq!("2000exp_5min_fluxes".without("_fluxes"), "2000exp_5min");
    /// assert_eq!("2000exp_5min".without("_fluxes"), "2000exp_5min");
    /// ```
    fn without(&self, pattern: &str) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }

    fn without(&self, pattern: &str) -> String {
        if pattern.is_empty() {
            return self.as_ref().to_string();
        }
        self.as_ref().replace(pattern, "")
    }
}
