pub mod churn;
