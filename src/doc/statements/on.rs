/*!
# `ON <expression> GOTO|GOSUB <line>,<line>,...`

## Purpose
Branch to one of several targets by number.

## Remarks
The expression rounds down to an integer. 1 picks the first target, 2
the second, and so on; `ON ... GOSUB` also remembers where to RETURN
to. A value off either end of the list falls through to the next
statement.

## Example
```text
10 ON K GOTO 100,200,300
20 PRINT "K WAS NOT 1, 2, OR 3"
```

*/
