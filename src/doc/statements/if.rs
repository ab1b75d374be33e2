/*!
# `IF <expression> THEN <statement> [ELSE <statement>]`

## Purpose
Do something contingent on a predicate.

## Remarks
Any value other than zero is true. Exactly one statement may follow
`THEN` and one may follow `ELSE`; there are no blocks.

## Example
```text
10 A=10
20 IF A<30 THEN A=A+10 ELSE GOTO 40
30 GOTO 20
40 PRINT A
30
```

*/
