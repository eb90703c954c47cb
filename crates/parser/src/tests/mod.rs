// Test module for parser
//
// This module contains unit tests for the expression parser.
// Tests are organized by category to ensure complete AST construction coverage.

mod expr_tests;
