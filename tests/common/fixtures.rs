//! Test fixtures - reusable icon content for tests.

/// A minimal plus icon with trailing newline
pub const PLUS_SVG: &str = "<svg width=\"16\" height=\"16\">\n<path d=\"M7 1h2v14H7zM1 7h14v2H1z\"/>\n</svg>\n";

/// A minimal node icon, no trailing newline
pub const NODE_SVG: &str = "<svg><circle r=\"4\"/></svg>";

/// A mesh icon saved with CRLF line endings
pub const MESH_SVG_CRLF: &str = "<svg>\r\n<rect/>\r\n</svg>\r\n";
