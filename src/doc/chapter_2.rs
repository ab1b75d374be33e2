/*!
# Expressions

All values are 32-bit signed integers. There are no strings except
literals in `PRINT` and `USER`, and no floating point.

## Operators

From lowest to highest precedence. Operators of equal precedence
evaluate left to right.

| Operator | Meaning |
|---|---|
| `<` `>` `=` | Comparison, 1 if true and 0 if false |
| `+` `-` `&` `\|` | Sum, difference, bitwise and, bitwise or |
| `*` `/` `%` | Product, truncating quotient, remainder |

Parentheses group. There is no unary minus; write `0-1`.

Comparisons chain without any special meaning. `1<2<3` is `(1<2)<3`,
which is `1<3`, which is 1. So is `3<2<1`.

## Numbers

A number literal is one to six decimal digits. Seven or more digits is
a syntax error.

## Errors

Dividing by zero is a `DIVISION BY ZERO` error. A result that does not
fit in 32 bits is an `OVERFLOW` error.

*/
