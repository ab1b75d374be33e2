/*!
# `GOTO <line number>`

## Purpose
Move execution to the specified line number.

## Remarks
A line that has run before is found immediately. A line that has
not is searched for from the start of the program. Jumping to a line
that does not exist is an `UNDEFINED LINE` error.

## Example
```text
10 GOTO 30
20 PRINT "SKIPPED"
30 PRINT "LANDED"
LANDED
```

*/
