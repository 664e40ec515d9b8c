//! Workspace-level integration tests for cosum live in `tests/`.
