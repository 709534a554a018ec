/*!
# `POKE <address>,<value>`

## Purpose
Write a byte of memory.

## Remarks
Addresses run 0 to 65535 and values 0 to 255; anything else is a
`?ILLEGAL QUANTITY ERROR`. The memory is plain storage read back with
PEEK. There are no soft switches at the famous addresses.

## Example
```text
POKE 768,123 : PRINT PEEK(768)
 123
```

*/
