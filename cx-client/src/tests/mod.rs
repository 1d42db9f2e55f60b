mod client_test;

use rstest::*;

use super::*;
