/*!
# `DIM <name>(<bounds>)[, ...]`

## Purpose
Declare arrays.

## Remarks
`DIM A(10,10)` makes a two-axis array indexed 0 through 10 on each
axis, every element starting at 0 (or "" for a string array). Using an
array with no DIM declares it on the spot with bound 10 on as many
axes as that first use supplied. An index outside the bounds, or the
wrong number of indices, is a `?BAD SUBSCRIPT ERROR`.

## Example
```text
10 DIM A(3), W$(2,5)
```

*/
