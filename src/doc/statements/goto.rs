/*!
# `GOTO <line number>`

## Purpose
Move execution to a line, immediately and unconditionally.

## Remarks
A target that does not exist is a `?UNDEF'D STATEMENT ERROR`.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/
