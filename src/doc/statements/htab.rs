/*!
# `HTAB <column>`

## Purpose
Move the cursor to a column on the current line.

## Remarks
Columns count from 1. A column below 1 is a
`?ILLEGAL QUANTITY ERROR`; what happens past the right edge is up to
the terminal.

## Example
```text
HTAB 10 : PRINT "X"
```

*/
