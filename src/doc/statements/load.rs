/*!
# `LOAD "<name>"`

## Purpose
Read a program from disk.

## Remarks
The current program and all state are wiped first, then the file is
read one line at a time just as if typed. A missing file prints
`?FILE NOT FOUND` and changes nothing else.

## Example
```text
LOAD "DEMO"
```

*/
