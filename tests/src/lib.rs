//! Cross-crate properties of compiled matchers.

#[cfg(test)]
mod end_to_end;
#[cfg(test)]
mod matcher_properties;
