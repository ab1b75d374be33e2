/*!
# `INPUT <expression>,<variable>`

## Purpose
Asks the host for a value.

## Remarks
The expression is handed to the host as a prompt; what it means is up
to the host. If the host answers, the answer is stored in the variable.
If it does not, the variable keeps its value.

## Example
```text
10 INPUT 1,A
20 PRINT A*2
```

*/
