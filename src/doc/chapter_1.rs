/*!
# Chapter 1: Programs

## Lines

A program is a sequence of numbered lines. Several statements can share
a line when separated by colons:

```text
10 X=5 : PRINT X : X=X+1
```

`REM` begins a remark; the rest of the line is ignored, colons included.

## Variables

A name starts with a letter and continues with letters and digits. A
trailing `$` makes it a string variable; anything else holds a number.
A numeric variable you have never assigned reads as 0, a string
variable as `""`. `LET` is optional: `LET X=1` and `X=1` are the same
statement.

## Arrays

`DIM A(10,10)` declares a two-dimensional array with indices 0 through
10 on each axis. Using an array without a `DIM` declares it on the spot
with every axis running 0 through 10 and as many axes as the first use
supplied. Reading or writing outside the declared bounds is a
`?BAD SUBSCRIPT ERROR` — as is coming back to a one-axis array with two
subscripts.

## Flow control

`GOTO n` jumps. `GOSUB n` jumps and remembers where it was;
`RETURN` comes back to the line after the `GOSUB`. `IF expr THEN ...`
runs the rest of its line only when the expression is true (nonzero); a
bare line number after `THEN` is a jump:

```text
10 IF X > 9 THEN 100
20 IF X > 9 THEN PRINT "NEVER REACHED" : PRINT "ALSO SKIPPED"
```

`ON expr GOTO 100,200,300` picks the first, second, or third target as
the expression rounds down to 1, 2, or 3; out of range falls through.
`ON expr GOSUB` works the same and remembers where it was.

`FOR I=1 TO 10 STEP 2` begins a loop; `NEXT I` (or a bare `NEXT`) adds
the step and loops until the variable passes the limit. The body always
runs at least once. `NEXT J,I` closes two loops at once, inner first.

## DATA

`DATA` lines hold constants, `READ` consumes them in line order no
matter how the program flows, and `RESTORE` rewinds to the first item.
Commas separate items; quote an item to keep commas or spaces inside
it; a colon outside quotes ends the list.

## The machine

`PEEK(a)` reads one of 65536 bytes and `POKE a,v` writes one. The bytes
are honest storage and nothing more — no screen memory, no soft
switches. `CALL a` accepts an address and, on this machine, does
nothing with it.
*/
