/* packages/cli/core/src/config/tests/mod.rs */

use super::types::*;
use super::*;

mod discovery;
