/*!
# `FOR <variable>=x TO y`
Where x and y are expressions.
## Purpose
Used with `NEXT` to repeat execution of lines
while counting a variable up by one.

## Remarks
The variable is assigned x, then y is evaluated once and kept as the bound.
Lines execute until a `NEXT` naming the same variable. `NEXT` adds one
and goes back to the line after the `FOR` while the variable is not
past the bound.

The first iteration always executes even if starting past the end.

At most four loops may be active at once. A `FOR` past that limit is
reported to the host as a diagnostic and its body runs once.

## Example
```text
10 FOR I=1 TO 3
20 PRINT I
30 NEXT I
40 END
1
2
3
```

*/
