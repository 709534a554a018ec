/*!
# Appendix A: Error Messages

Inside a running program every message carries the line it happened on,
as in `?SYNTAX ERROR IN 10`. In immediate mode the message stands
alone.

```text
?SYNTAX ERROR             Unrecognized statement or malformed expression.
                          Some carry a detail, as in
                          ?SYNTAX ERROR: EXPECTED THEN.
?DIVISION BY ZERO ERROR   The divisor of / was zero.
?ILLEGAL QUANTITY ERROR   Argument outside its domain: SQR of a
                          negative, ASC of an empty string, a PEEK or
                          POKE off the end of memory, HTAB 0.
?UNDEF'D STATEMENT ERROR  A jump named a line that does not exist.
?UNDEF'D FUNCTION ERROR   FN called a name with no DEF FN. The message
                          names it: ?UNDEF'D FUNCTION ERROR: FNSQ.
?RETURN WITHOUT GOSUB ERROR
?NEXT WITHOUT FOR ERROR   The loop stacks were empty, or NEXT named a
                          variable with no live loop.
?OUT OF DATA ERROR        READ ran past the last DATA item.
?TYPE MISMATCH ERROR      A number met a string: assignment across the
                          $ boundary, arithmetic on a string, READ of
                          text into a numeric variable.
?BAD SUBSCRIPT ERROR      Array index out of bounds, or the wrong
                          number of subscripts.
?CAN'T CONTINUE ERROR     CONT with nothing stopped, or after the
                          program changed.
?FILE NOT FOUND           LOAD named a file that is not there.
BREAK IN 20               Not an error: STOP reporting where it
                          stopped. CONT resumes.
```
*/
