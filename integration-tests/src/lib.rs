//! End-to-end tests against a deployed order logging stack live in `tests/`.
