//! Static pages: system blueprint and settings placeholder

const BLUEPRINT: &str = "\
System Blueprint
Hybrid Low-Code Architecture for Aisha Bakery.

Core Infrastructure

  CLIENT LAYER            LOGIC LAYER                     DATA LAYER
  +----------------+      +---------------------------+   Central Database
  | Web Client     |      |   API Gateway / Logic     |     PostgreSQL (Relational)
  | React 18 SPA   | ---> |   Node.js / Python        |     Single Source of Truth
  +----------------+      +-------------+-------------+
  | Shop Floor     |      | AI Service  | Costing     |   Cloud Storage
  | Touch + Scanner|      | Gemini 2.5  | FIFO/Landed |     Docs / Backups
  +----------------+      +-------------+-------------+

Data Model Strategy
  1. Unified Ledger: All financial impacts (Purchase, Production, Sales) hit a single
     GL transaction table for real-time reporting.
  2. Lot Inheritance: Finished goods inherit Lot IDs from raw materials for backward
     traceability.

Security & Compliance
  * Role-Based Access (RBAC): Shop floor users restricted to specific terminal views
    to prevent errors.
  * Audit Trail: Immutable logs for all BoM changes and inventory adjustments for
    complete transparency.
";

/// Render the system blueprint
#[must_use]
pub fn render_blueprint() -> String {
    BLUEPRINT.to_string()
}

/// Render the settings placeholder
#[must_use]
pub fn render_settings() -> String {
    "Settings Module\nConfiguration for Users, GL Accounts, and Printers.\n".to_string()
}
