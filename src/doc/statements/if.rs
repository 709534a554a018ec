/*!
# `IF <expression> THEN <statements or line number>`

## Purpose
Execute conditionally.

## Remarks
Any nonzero value is true. When true, the rest of the line runs; a
bare line number after THEN is a jump. When false the whole rest of
the line is skipped, colons and all. There is no ELSE.

## Example
```text
10 IF X > 9 THEN 100
20 IF X = 1 THEN PRINT "ONE" : PRINT "UNIT"
```

*/
