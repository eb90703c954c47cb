// Test module for lexer
//
// This module contains unit tests for the math expression lexer.
// Tests are organized by category to ensure complete coverage.
