mod insertion;
