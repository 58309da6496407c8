//! Graph checks over the directed part of a CPDAG.

pub mod dag_enforcement;
