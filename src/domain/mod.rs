// Domain layer - Company snapshot, value history and chart rendering
pub mod chart;
pub mod company;
pub mod history;
