//! This module contains the tests for the glyph definition parser.

mod successes;
