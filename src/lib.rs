//! PrismHR HR and payroll API relay served over the Model Context Protocol.

pub mod mcp;
