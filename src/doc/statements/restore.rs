/*!
# `RESTORE`

## Purpose
Rewind the DATA pool so READ starts over from the first item.

## Example
```text
10 DATA 7
20 READ A : RESTORE : READ B
30 PRINT A;B
RUN
 7  7
```

*/
