/*!
# `RETURN`

## Purpose
Come back from a GOSUB.

## Remarks
Execution resumes at the line after the most recent GOSUB, which is
forgotten. RETURN with nothing to pop is a
`?RETURN WITHOUT GOSUB ERROR`.

## Example
```text
100 PRINT "SUBROUTINE"
110 RETURN
```

*/
