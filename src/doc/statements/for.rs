/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.

## Purpose
Used with `NEXT` to repeat statements while counting.

## Remarks
On the first pass the variable gets x. Each `NEXT` adds z (1 when STEP
is omitted) and loops back to the statement after the FOR until the
variable passes y. The limit and step are fixed when the FOR executes.

The first pass always runs, even when x already lies past y.

## Example
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT I;
30 NEXT
RUN
 1  3  5  7
```

*/
