/*!
# `[LET] <variable>=<expression>`

## Purpose
Assigns a value to a variable.

## Remarks
The word `LET` is optional. Variables are the single letters `A` to `Z`;
case does not matter. Every variable starts at zero.

## Example
```text
10 LET A=1
20 B=A+1
30 PRINT A,B
1 2
```

*/
