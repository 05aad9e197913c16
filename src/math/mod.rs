pub mod impurity;
pub mod optimizer;
