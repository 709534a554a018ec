/*!
# `RUN [<line number>]`

## Purpose
Run the stored program.

## Remarks
Variables, arrays, loops, and the DATA pointer reset, the DATA pool
rebuilds, and execution starts at the lowest line number, or at the
first line at or past the given number. The program itself and DEF FN
definitions are kept; the program redefines functions as its DEF
lines execute.

## Example
```text
10 PRINT "HELLO"
RUN
HELLO
```

*/
