/*!
# `GOSUB <line number>`

## Purpose
Jump to a subroutine, remembering where to come back.

## Remarks
`RETURN` comes back to the line after the GOSUB, so statements after a
GOSUB on the same line are skipped. Subroutines nest; each RETURN pops
the most recent GOSUB.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
RUN
HELLO WORLD
```

*/
