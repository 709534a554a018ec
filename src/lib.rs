//! # Applesoft BASIC
//!
//! The BASIC programming language as it shipped on the Apple ][.
//! ```text
//! APPLESOFT BASIC
//! ]█
//! ```
//!
//! ## Getting Started
//!
//! Run the executable to get the `]` prompt. Type a statement to run it
//! immediately, or start it with a line number to add it to the program.
//! `RUN` runs the program, `SAVE "NAME"` and `LOAD "NAME"` keep it on
//! disk, and `QUIT` leaves.
//!
//! This is the manual. The chapters cover entering programs, the
//! expression language, and every statement and function.
//!

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/chapter_4.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_4;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
