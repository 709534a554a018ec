/*!
# `VTAB <row>`

## Purpose
Move the cursor to a row of the screen.

## Remarks
Rows count from 1 at the top. A row below 1 is a
`?ILLEGAL QUANTITY ERROR`; rows past the bottom are the terminal's
problem.

## Example
```text
VTAB 12 : HTAB 20 : PRINT "CENTERED-ISH"
```

*/
