/*!
# `NEXT [<variable>[,<variable>...]]`

## Purpose
Close a FOR loop.

## Remarks
A bare NEXT closes the innermost loop. Naming a variable closes that
loop, abandoning any loops begun inside it. A list closes several,
left to right, so `NEXT J,I` ends the inner loop then the outer.
NEXT with no live loop is a `?NEXT WITHOUT FOR ERROR`.

## Example
```text
10 FOR I=1 TO 2
20 FOR J=5 TO 6
30 PRINT I;J
40 NEXT J,I
```

*/
