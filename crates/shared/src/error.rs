use std::{
  backtrace::{Backtrace, BacktraceStatus},
  fmt::{Debug, Display},
};

pub struct AppError {
  err: anyhow::Error,
}

impl AppError {
  pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
    Self { err: err.into() }
  }

  /// Get backtrace from anyhow (requires `RUST_BACKTRACE=1` to capture)
  pub fn backtrace(&self) -> &Backtrace {
    self.err.backtrace()
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.err, f)
  }
}

// `main` returning `Err` prints this, so keep the chain and backtrace readable.
impl Debug for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:#}", self.err)?;
    let bt = self.err.backtrace();
    if bt.status() == BacktraceStatus::Captured {
      write!(f, "\nBacktrace:\n{bt}")
    } else {
      write!(f, "\n(hint: set RUST_BACKTRACE=1 to enable backtrace)")
    }
  }
}

impl<E> From<E> for AppError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Self::new(err)
  }
}

#[cfg(test)]
mod tests {
  use anyhow::anyhow;

  use super::*;

  #[test]
  fn display_and_debug_show_the_error_chain() {
    let err = AppError::new(anyhow!("disk full").context("saving collection"));

    assert_eq!(err.to_string(), "saving collection");
    assert!(format!("{err:?}").starts_with("saving collection: disk full"));
  }
}
