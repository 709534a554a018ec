/*!
# `SAVE "<name>"`

## Purpose
Write the program to disk.

## Remarks
Plain text, one program line per file line, in ascending order, each
as `<number> <text>`. LOAD reads the same format back.

## Example
```text
SAVE "DEMO"
```

*/
