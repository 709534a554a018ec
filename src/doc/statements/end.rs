/*!
# `END`

## Purpose
Stop the program silently.

## Remarks
Unlike STOP, END prints nothing. CONT resumes at the following line.
Running off the bottom of the program ends it just the same.

## Example
```text
10 PRINT "DONE"
20 END
30 PRINT "NEVER"
RUN
DONE
```

*/
