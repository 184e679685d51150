//! Shared fixtures and a minimal resolver for driving the tree builder.

#![allow(dead_code)]
