/*!
# Errors

Errors stop the current line and are returned to the host from `step`.
The runtime stays where the error happened.

| Code | Message | Cause |
|---|---|---|
| 2 | SYNTAX ERROR | A line does not follow the grammar, or contains an unterminated string, a number over six digits, or a character BASIC does not use. |
| 6 | OVERFLOW | Arithmetic result out of range. |
| 8 | UNDEFINED LINE | `GOTO`, `GOSUB`, `RETURN` or `NEXT` to a line that does not exist. |
| 11 | DIVISION BY ZERO | `/` or `%` by zero. |

# Diagnostics

These are not errors. The statement is skipped and the program keeps
running. The host is told through its `diagnostic` callback.

| Code | Message | Cause |
|---|---|---|
| 1 | NEXT WITHOUT FOR | `NEXT` names a variable that is not the innermost loop. |
| 3 | RETURN WITHOUT GOSUB | `RETURN` with no pending `GOSUB`. |
| 7 | OUT OF MEMORY | Too many nested `GOSUB` or `FOR`. |

*/
