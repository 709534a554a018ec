/*!
# `DEF FN <name>(<parameter>) = <expression>`

## Purpose
Define a one-line function.

## Remarks
The body is a single expression, captured up to the end of the line or
a colon. Call it as `FN name(argument)`. The parameter is an ordinary
variable: it holds the argument while the body evaluates and gets its
old value back afterward. Defining the same name again replaces the
function, so a program redefines its functions every RUN.

## Example
```text
10 DEF FN SQ(X)=X*X
20 PRINT FN SQ(7)
RUN
 49
```

*/
